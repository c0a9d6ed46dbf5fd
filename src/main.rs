use anyhow::Result;
use rest_graphql_gateway::{Config, Gateway, LoggingMiddleware};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = Config::from_env()?;

    println!("GraphQL endpoint: http://{}/graphql", config.listen_addr);
    println!("Try these operations once the server is up:");
    println!("  query {{ allProducts {{ id name code price quantity company }} }}");
    println!("  query {{ user(id:\"demo\") {{ id name email age }} }}");
    println!(
        "  mutation {{ addUser(name:\"A\", email:\"a@x.com\", age:30) {{ id name email age }} }}"
    );
    println!("  mutation {{ updateProduct(id:\"p1\", price:9.5) {{ id name price }} }}");

    Gateway::builder()
        .with_config(&config)
        .add_middleware(LoggingMiddleware)
        .serve(config.listen_addr.to_string())
        .await?;

    Ok(())
}
