//! Index/document lifecycle smoke test against a live cluster.
//!
//! Runs a fixed sequence of create/delete calls and pretty-prints every
//! response or error. Per-step failures are printed and skipped; running the
//! program twice shows the already-exists and version-conflict replies.
//! Only a missing password or a failed client construction is fatal.

use opensearch_client::prelude::*;
use serde::Serialize;
use serde_json::json;
use tracing::info;

fn report<T: Serialize>(label: &str, result: Result<T, AppError>) {
    match result {
        Ok(resp) => match serde_json::to_string_pretty(&resp) {
            Ok(body) => println!("{label}:\n{body}"),
            Err(e) => println!("{label}: {e}"),
        },
        Err(e) => println!("{label} failed: {e}"),
    }
}

#[tokio::main]
async fn main() {
    setup_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let client = match Client::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("cannot initialize client: {e}");
            std::process::exit(1);
        }
    };
    info!("client created");

    // Run this program again to get a resource_already_exists_exception reply
    report("Create Index", client.create_index("movies").await);

    report(
        "Delete Index, Ignore Unavailable true",
        client
            .delete_index(&IndicesDeleteRequest::new(vec!["games"]).with_ignore_unavailable(true))
            .await,
    );

    // With ignore_unavailable false this returns index_not_found_exception
    report(
        "Delete Index, Ignore Unavailable false",
        client
            .delete_index(&IndicesDeleteRequest::new(vec!["games"]).with_ignore_unavailable(false))
            .await,
    );

    report(
        "Create Doc",
        client
            .create_document(&DocumentCreateRequest::new(
                "movies",
                "1",
                json!({"title": "Beauty and the Beast", "year": 1991}),
            ))
            .await,
    );

    // Run this program again to get a version_conflict_engine_exception reply
    report(
        "Create Doc",
        client
            .create_document(&DocumentCreateRequest::new(
                "movies",
                "2",
                json!({"title": "Beauty and the Beast - Live Action", "year": 2017}),
            ))
            .await,
    );

    report(
        "Del Doc",
        client
            .delete_document(&DocumentDeleteRequest::new("movies", "1"))
            .await,
    );

    // A failed document delete answers in a different format than the other
    // endpoints: a document write response with result "not_found" instead of
    // the error envelope.
    report(
        "Del Doc",
        client
            .delete_document(&DocumentDeleteRequest::new("movies", "3"))
            .await,
    );
}
