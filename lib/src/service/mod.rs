pub mod bedrock_service;
pub mod common_structs;
pub mod detector;

use aws_config::SdkConfig;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub bedrock: bedrock_service::BedrockService,
}

impl CommonService {
    pub fn new(config: &SdkConfig) -> Self {
        let bedrock_client = aws_sdk_bedrockruntime::Client::new(config);

        Self {
            bedrock: bedrock_service::BedrockService::new(&bedrock_client),
        }
    }
}
