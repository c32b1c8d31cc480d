//! `DeleteOrder` Lambda entry point

use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};
use order_api::{bootstrap, handlers::delete_order};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let order_store = bootstrap::init().await?;

    run(service_fn(move |request: Request| {
        let order_store = Arc::clone(&order_store);
        async move { Ok::<_, Error>(delete_order::handler(order_store.as_ref(), &request).await) }
    }))
    .await
}
