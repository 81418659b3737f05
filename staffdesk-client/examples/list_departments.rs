// staffdesk-client/examples/list_departments.rs
// Fetch and print the department list from a running backend.

use staffdesk_client::{ClientConfig, CollectionClient, Department, ResourceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    tracing::info!("API base URL: {}", config.base_url);

    let client: ResourceClient<Department> = ResourceClient::new(config.build_http_client());

    let departments = client.fetch_all().await?;
    println!("{} department(s):", departments.len());
    for dep in &departments {
        println!("  [{}] {}", dep.department_id, dep.department_name);
    }

    Ok(())
}
