//! `ListOrders` Lambda entry point

use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};
use order_api::{bootstrap, handlers::list_orders};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let order_store = bootstrap::init().await?;

    // Request body is ignored
    run(service_fn(move |_request: Request| {
        let order_store = Arc::clone(&order_store);
        async move { Ok::<_, Error>(list_orders::handler(order_store.as_ref()).await) }
    }))
    .await
}
