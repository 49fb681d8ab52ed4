use crate::adapters::storage::FileStore;
use crate::config::cli::{
    BusinessCommand, CampaignCommand, CampaignLogCommand, Cli, Command, MemberCommand,
    ProductCommand, SessionCommand,
};
use crate::config::toml_config::AppConfig;
use crate::core::client::FlexiAdsClient;
use crate::core::session::{SessionContext, SessionStore};
use crate::domain::model::{AcceptInvitation, AvatarUpload, LoginResponse};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

/// 解析 `--data` 的 JSON 內容
pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| GatewayError::ValidationError {
        message: format!("Invalid --data payload: {}", e),
    })
}

pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match (&cli.config, &cli.base_url) {
        (Some(path), _) => AppConfig::from_file(path)?,
        (None, Some(base_url)) => AppConfig::with_base_url(base_url.clone()),
        (None, None) => {
            return Err(GatewayError::MissingConfigError {
                field: "--config or --base-url".to_string(),
            })
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    config.validate()?;
    Ok(config)
}

pub struct App {
    client: FlexiAdsClient,
    session: Arc<SessionStore<FileStore>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let session = Arc::new(SessionStore::new(FileStore::new(config.session_path())));
        let client = FlexiAdsClient::from_config(config, session.clone())?;
        Ok(Self { client, session })
    }

    pub async fn run(&self, command: Command) -> Result<Value> {
        match command {
            Command::Session(cmd) => self.session_command(cmd).await,
            Command::Campaign(cmd) => self.campaign_command(cmd).await,
            Command::Result(cmd) => self.result_command(cmd).await,
            Command::Spend(cmd) => self.spend_command(cmd).await,
            Command::Bid(cmd) => self.bid_command(cmd).await,
            Command::Business(cmd) => self.business_command(cmd).await,
            Command::Member(cmd) => self.member_command(cmd).await,
            Command::Product(cmd) => self.product_command(cmd).await,
        }
    }

    async fn session_command(&self, cmd: SessionCommand) -> Result<Value> {
        match cmd {
            SessionCommand::Login(payload) => {
                let response: LoginResponse = parse_payload(&payload.data)?;
                let context = SessionContext::from_login(response)?;
                self.session.establish(&context).await;
                Ok(session_json(&context))
            }
            SessionCommand::Show => {
                let context = self.session.load().await;
                let mut value = session_json(&context);
                value["loggedIn"] = json!(self.session.is_logged_in().await);
                Ok(value)
            }
            SessionCommand::Logout => {
                self.session.clear().await;
                Ok(json!({ "loggedIn": false }))
            }
        }
    }

    async fn campaign_command(&self, cmd: CampaignCommand) -> Result<Value> {
        let boost = self.client.boost();
        Ok(match cmd {
            CampaignCommand::List => boost.list_campaigns().await,
            CampaignCommand::Get { id } => boost.get_campaign(id).await,
            CampaignCommand::Create(payload) => {
                boost.create_campaign(&parse_payload(&payload.data)?).await
            }
            CampaignCommand::Update { id, payload } => {
                boost.update_campaign(id, &parse_payload(&payload.data)?).await
            }
            CampaignCommand::Delete { id } => boost.delete_campaign(id).await,
            CampaignCommand::Pause { id } => boost.pause_campaign(id).await,
            CampaignCommand::Resume { id } => boost.resume_campaign(id).await,
        })
    }

    async fn result_command(&self, cmd: CampaignLogCommand) -> Result<Value> {
        let boost = self.client.boost();
        Ok(match cmd {
            CampaignLogCommand::List { campaign_id } => boost.list_results(campaign_id).await,
            CampaignLogCommand::Create {
                campaign_id,
                payload,
            } => {
                boost
                    .create_result(campaign_id, &parse_payload(&payload.data)?)
                    .await
            }
            CampaignLogCommand::Update { id, payload } => {
                boost.update_result(id, &parse_payload(&payload.data)?).await
            }
            CampaignLogCommand::Delete { id } => boost.delete_result(id).await,
        })
    }

    async fn spend_command(&self, cmd: CampaignLogCommand) -> Result<Value> {
        let boost = self.client.boost();
        Ok(match cmd {
            CampaignLogCommand::List { campaign_id } => boost.list_spend_logs(campaign_id).await,
            CampaignLogCommand::Create {
                campaign_id,
                payload,
            } => {
                boost
                    .create_spend_log(campaign_id, &parse_payload(&payload.data)?)
                    .await
            }
            CampaignLogCommand::Update { id, payload } => {
                boost
                    .update_spend_log(id, &parse_payload(&payload.data)?)
                    .await
            }
            CampaignLogCommand::Delete { id } => boost.delete_spend_log(id).await,
        })
    }

    async fn bid_command(&self, cmd: CampaignLogCommand) -> Result<Value> {
        let boost = self.client.boost();
        Ok(match cmd {
            CampaignLogCommand::List { campaign_id } => boost.list_bid_logs(campaign_id).await,
            CampaignLogCommand::Create {
                campaign_id,
                payload,
            } => {
                boost
                    .create_bid_log(campaign_id, &parse_payload(&payload.data)?)
                    .await
            }
            CampaignLogCommand::Update { id, payload } => {
                boost.update_bid_log(id, &parse_payload(&payload.data)?).await
            }
            CampaignLogCommand::Delete { id } => boost.delete_bid_log(id).await,
        })
    }

    async fn business_command(&self, cmd: BusinessCommand) -> Result<Value> {
        let business = self.client.business();
        match cmd {
            BusinessCommand::Register(payload) => {
                let registration = business
                    .register_business(&parse_payload(&payload.data)?)
                    .await;
                Ok(serde_json::to_value(registration)?)
            }
            BusinessCommand::Details { member_id } => business.details(&member_id).await,
            BusinessCommand::AddMore(payload) => {
                business
                    .add_more_account(&parse_payload(&payload.data)?)
                    .await
            }
            BusinessCommand::Update { member_id, payload } => {
                business
                    .update_details(&member_id, &parse_payload(&payload.data)?)
                    .await
            }
            BusinessCommand::Accounts { user_id } => business.accounts_for_user(user_id).await,
            BusinessCommand::Avatar { member_id } => business.avatar(&member_id).await,
            BusinessCommand::SetAvatar {
                id,
                file,
                content_type,
            } => {
                let bytes = tokio::fs::read(&file).await?;
                let file_name = file
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("avatar")
                    .to_string();
                business
                    .update_avatar(
                        id,
                        AvatarUpload {
                            file_name,
                            content_type,
                            bytes,
                        },
                    )
                    .await
            }
        }
    }

    async fn member_command(&self, cmd: MemberCommand) -> Result<Value> {
        let member = self.client.member();
        match cmd {
            MemberCommand::Create(payload) => member.create(&parse_payload(&payload.data)?).await,
            MemberCommand::Delete { unique_id } => member.soft_delete(&unique_id).await,
            MemberCommand::List { business_id } => member.list_by_business(business_id).await,
            MemberCommand::Invite(payload) => member.invite(&parse_payload(&payload.data)?).await,
            MemberCommand::Accept { unique_id } => {
                member
                    .accept_invitation(&AcceptInvitation { unique_id })
                    .await
            }
            MemberCommand::Pending { user_id } => member.pending_invitations(user_id).await,
        }
    }

    async fn product_command(&self, cmd: ProductCommand) -> Result<Value> {
        let product = self.client.product();
        Ok(match cmd {
            ProductCommand::Create(payload) => product.create(&parse_payload(&payload.data)?).await,
            ProductCommand::Get { id } => product.get(id).await,
            ProductCommand::List { business_id } => product.list_by_business(business_id).await,
            ProductCommand::Search { business_id, q } => product.search(business_id, &q).await,
            ProductCommand::Delete { id } => product.delete(id).await,
        })
    }
}

fn session_json(context: &SessionContext) -> Value {
    json!({
        "authenticated": context.is_authenticated(),
        "userId": context.user_id,
        "memberId": context.member_id,
        "businessId": context.business_id,
    })
}
