//! Request Router
//!
//! Maps a parsed request to exactly one store operation and the
//! operation's outcome to a status code and body.
//!
//! ## Dispatch Table
//! - `GET /boards` → list boards
//! - `POST /boards/<name>` → create board
//! - `DELETE /boards/<name>` → delete board
//! - `GET /board/<name>` → list posts
//! - `POST /board/<name>` + body → create post (400 on empty body)
//! - `DELETE /board/<name>/<id>` → delete post
//! - `PUT /board/<name>/<id>` → update post
//! - anything else → 404
//!
//! Every store operation is attempted at most once per request; nothing is
//! retried and the store is never touched speculatively.

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::{Method, Request, Response, Target};
use crate::store::{BoardStore, StoreOutcome};

/// Dispatch one request against the store and build the response.
///
/// The only `Err` is the fatal name-over-limit condition from
/// `create_board`; everything else is an ordinary status code.
pub fn dispatch(store: &mut BoardStore, request: &Request) -> Result<Response> {
    let outcome = match (request.method, &request.target) {
        // keyed on the resource kind: a stray name segment does not change
        // the operation
        (Some(Method::Get), Target::Boards { .. }) => store.list_boards(),

        (Some(Method::Post), Target::Boards { name: Some(name) }) => store.create_board(name)?,

        (Some(Method::Delete), Target::Boards { name: Some(name) }) => store.delete_board(name),

        (Some(Method::Get), Target::Board { name, id: None }) => store.list_posts(name),

        (Some(Method::Post), Target::Board { name, id: None }) => {
            // A missing or zero-length body short-circuits before the store
            // is touched.
            if request.content_length == 0 {
                return Ok(Response::bad_request());
            }
            store.create_post(name, body_of(request))
        }

        (Some(Method::Delete), Target::Board { name, id: Some(id) }) => {
            store.delete_post(name, *id)
        }

        (Some(Method::Put), Target::Board { name, id: Some(id) }) => {
            store.update_post(name, *id, body_of(request))
        }

        // Unrecognized method, unroutable path, or an unmatched
        // method/path combination.
        _ => StoreOutcome::NotFound,
    };

    Ok(build_response(outcome))
}

/// Translate a store outcome 1:1 into a response.
fn build_response(outcome: StoreOutcome) -> Response {
    match outcome {
        StoreOutcome::Ok(body) => Response::ok(body),
        StoreOutcome::Created => Response::created(),
        StoreOutcome::NotFound => Response::not_found(),
        StoreOutcome::Conflict => Response::conflict(),
    }
}

/// The request body, empty when absent. A `PUT` without a body replaces
/// the post's content with the empty string.
fn body_of(request: &Request) -> Bytes {
    request.body.clone().unwrap_or_else(Bytes::new)
}
