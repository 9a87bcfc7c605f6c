mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use war_torn_faith_api::Application;
use war_torn_faith_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("war_torn_faith".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}
