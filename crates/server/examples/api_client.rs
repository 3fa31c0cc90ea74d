//! Walk through the catalog API against a running server
//!
//! ```text
//! cargo run -p catalogo-server &
//! cargo run -p catalogo-server --example api_client
//! ```

use reqwest::Client;
use serde_json::Value;

const SERVER_URL: &str = "http://localhost:4000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Full catalog:");
    let authors: Vec<Value> = client
        .get(format!("{SERVER_URL}/api"))
        .send()
        .await?
        .json()
        .await?;
    for author in &authors {
        println!(
            "  {} {}",
            author["autor_nombre"].as_str().unwrap_or_default(),
            author["autor_apellido"].as_str().unwrap_or_default()
        );
    }
    println!();

    let lookups = [
        ("3. By surname", "/api/apellido/garc%C3%ADa%20m%C3%A1rquez"),
        ("4. By name and surname", "/api/nombre_apellido/Julio/Cort%C3%A1zar"),
        ("5. By name and surname prefix", "/api/nombre/Gabriel?apellido=Gar"),
        ("6. By edition year", "/api/edicion/1967"),
        ("7. Unknown surname", "/api/apellido/zzznoexist"),
        ("8. Invalid year", "/api/edicion/mil"),
    ];

    for (title, path) in lookups {
        println!("{title}:");
        let resp = client.get(format!("{SERVER_URL}{path}")).send().await?;
        println!("Status: {}", resp.status());
        println!("Body: {}", resp.text().await?);
        println!();
    }

    Ok(())
}
