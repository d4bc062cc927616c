use clap::Parser;
use photo_shopping::{cli, client, config, error, report, search};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "photo_shopping=debug,photo_shopping_common=debug"
    } else {
        "photo_shopping=info,photo_shopping_common=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search { photo, category, server, html } => {
            println!("🛍  photo-shopping - 写真から商品検索\n");
            let config = Config::load()?;

            let request = search::SearchRequest {
                server: config.resolve_server(server),
                category: category.unwrap_or(config.default_category),
                photo,
            };
            let transport = client::ReqwestTransport::new(Duration::from_secs(config.timeout_seconds))?;

            let outcome = search::run_search(transport, &request).await?;
            let query = outcome.response.query.as_deref();

            if let Some(q) = query {
                println!("検索クエリ: {}\n", q);
            }

            let products = &outcome.response.products;
            if products.is_empty() {
                println!("商品が見つかりませんでした");
            }
            for (i, product) in products.iter().enumerate() {
                println!("{:>2}. {}", i + 1, product.title);
                println!("    {}", product.price_and_seller);
                println!("    送料: {}", product.shipping_price);
                println!("    {}", product.link);
            }

            if let Some(path) = html {
                report::write_results_page(&path, query, &outcome.cards)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }

            println!("\n✅ {}件の商品", products.len());
        }

        Commands::Config { set_server, show } => {
            // 壊れた設定ファイルでも上書きできるように読み込みエラーは無視する
            let mut config = Config::load_or_default();

            if let Some(url) = set_server {
                search::parse_server_url(&url)?;
                config.set_server_url(url)?;
                println!("✔ サーバーURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  サーバー: {}", config.server_url());
                println!("  カテゴリ: {}", config.default_category);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
