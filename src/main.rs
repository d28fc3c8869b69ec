use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use storefront::application::checkout::CheckoutService;
use storefront::domain::order::Order;
use storefront::domain::ports::{OrderStoreBox, PaymentGatewayBox, ProductStoreBox};
use storefront::domain::purchase::{PaymentInfo, Purchase};
use storefront::infrastructure::in_memory::{
    InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore,
};
use storefront::infrastructure::offline::OfflineGateway;
use storefront::interfaces::csv::order_writer::{OrderConfirmation, OrderWriter};
use storefront::interfaces::csv::product_reader::{CategoryReader, ProductReader};
use storefront::interfaces::json::purchase_reader::PurchaseReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product catalog CSV file
    products: PathBuf,

    /// Purchase requests, one JSON object per line
    purchases: PathBuf,

    /// Product categories CSV file (optional)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Stripe secret key. Falls back to the offline gateway when absent.
    #[cfg(feature = "gateway-stripe")]
    #[arg(long, env = "STRIPE_SECRET_KEY")]
    stripe_secret_key: Option<String>,
}

/// Builds the checkout service over the selected storage backend, along with
/// shared product and order handles for catalog loading and confirmation
/// lookups.
fn build_service(cli: &Cli) -> Result<(CheckoutService, ProductStoreBox, OrderStoreBox)> {
    let gateway = build_gateway(cli);

    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        use storefront::infrastructure::rocksdb::RocksDbStore;
        let store = RocksDbStore::open(db_path).into_diagnostic()?;
        let service = CheckoutService::new(
            Box::new(store.clone()),
            Box::new(store.clone()),
            Box::new(store.clone()),
            gateway,
        );
        return Ok((service, Box::new(store.clone()), Box::new(store)));
    }

    let products = InMemoryProductStore::new();
    let orders = InMemoryOrderStore::new();
    let service = CheckoutService::new(
        Box::new(products.clone()),
        Box::new(InMemoryCustomerStore::new()),
        Box::new(orders.clone()),
        gateway,
    );
    Ok((service, Box::new(products), Box::new(orders)))
}

fn build_gateway(cli: &Cli) -> PaymentGatewayBox {
    #[cfg(feature = "gateway-stripe")]
    if let Some(key) = &cli.stripe_secret_key {
        use storefront::infrastructure::stripe::StripeGateway;
        tracing::info!("using Stripe payment gateway");
        return Box::new(StripeGateway::new(key.clone()));
    }
    let _ = cli;
    Box::new(OfflineGateway::new())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (service, products, order_reader) = build_service(&cli)?;

    // Seed the catalog before accepting purchases.
    if let Some(path) = &cli.categories {
        let file = File::open(path).into_diagnostic()?;
        for result in CategoryReader::new(file).categories() {
            match result {
                Ok(category) => products.store_category(category).await.into_diagnostic()?,
                Err(e) => tracing::warn!("Error reading category: {e}"),
            }
        }
    }

    let file = File::open(&cli.products).into_diagnostic()?;
    let mut loaded = 0usize;
    for result in ProductReader::new(file).products() {
        match result {
            Ok(product) => {
                products.store(product).await.into_diagnostic()?;
                loaded += 1;
            }
            Err(e) => tracing::warn!("Error reading product: {e}"),
        }
    }
    tracing::info!(loaded, "catalog loaded");

    let file = File::open(&cli.purchases).into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());

    for result in PurchaseReader::new(file).purchases() {
        let purchase = match result {
            Ok(purchase) => purchase,
            Err(e) => {
                tracing::warn!("Error reading purchase: {e}");
                continue;
            }
        };

        match checkout(&service, &order_reader, purchase).await {
            Ok(confirmation) => {
                writer.write_confirmation(&confirmation).into_diagnostic()?;
            }
            Err(e) => tracing::warn!("Error processing purchase: {e}"),
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

/// Runs one purchase through the full flow: intent, order, settlement.
async fn checkout(
    service: &CheckoutService,
    order_reader: &OrderStoreBox,
    purchase: Purchase,
) -> storefront::error::Result<OrderConfirmation> {
    let (total, _) = Order::totals_of(&purchase.order_items);
    let info = PaymentInfo {
        amount: total.minor_units(),
        currency: "usd".to_string(),
        receipt_email: Some(purchase.customer.email.clone()),
    };

    let intent = service.create_payment_intent(&info).await?;
    let response = service.place_order(purchase).await?;
    service.mark_paid(response.order_tracking_number).await?;

    let order = order_reader
        .get(response.order_tracking_number)
        .await?
        .ok_or_else(|| {
            storefront::error::CommerceError::NotFound(format!(
                "order {}",
                response.order_tracking_number
            ))
        })?;

    Ok(OrderConfirmation::new(&order, &intent))
}
