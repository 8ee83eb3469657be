use crate::core::domain::Configuration;
use crate::gateway::http::job_client::HttpJobGateway;
use crate::gateway::jobs::{JobGateway, NoopJobGateway};

pub async fn create_job_gateway(config: &Configuration) -> Box<dyn JobGateway> {
    if config.use_job_service {
        Box::new(HttpJobGateway::new(config.job_service_url.as_str()))
    } else {
        Box::new(NoopJobGateway)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_job_gateway;
    use crate::gateway::jobs::JobGateway;

    #[tokio::test]
    async fn test_should_create_noop_gateway_by_default() {
        let config = Configuration::new("hold_requests");
        let gateway = create_job_gateway(&config).await;
        assert_eq!(None, gateway.create_job().await.expect("should create"));
    }
}
