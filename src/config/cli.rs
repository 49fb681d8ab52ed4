use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flexi-ads")]
#[command(about = "Manage Flexi Ads boost campaigns, products and business accounts")]
pub struct Cli {
    #[arg(long, short, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override api.base_url")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Local session (token and ids)
    #[command(subcommand)]
    Session(SessionCommand),
    /// Boost campaigns
    #[command(subcommand)]
    Campaign(CampaignCommand),
    /// Daily results of a campaign
    #[command(subcommand)]
    Result(CampaignLogCommand),
    /// Spend logs of a campaign
    #[command(subcommand)]
    Spend(CampaignLogCommand),
    /// Bid logs of a campaign
    #[command(subcommand)]
    Bid(CampaignLogCommand),
    /// Business accounts
    #[command(subcommand)]
    Business(BusinessCommand),
    /// Business members and invitations
    #[command(subcommand)]
    Member(MemberCommand),
    /// Products
    #[command(subcommand)]
    Product(ProductCommand),
}

#[derive(Debug, Clone, Args)]
pub struct Payload {
    #[arg(long, help = "Request body as JSON")]
    pub data: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SessionCommand {
    /// Store a login response (`{"token": ..., "user": {...}}`)
    Login(Payload),
    Show,
    Logout,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CampaignCommand {
    List,
    Get { id: i64 },
    Create(Payload),
    Update {
        id: i64,
        #[command(flatten)]
        payload: Payload,
    },
    Delete { id: i64 },
    Pause { id: i64 },
    Resume { id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CampaignLogCommand {
    List { campaign_id: i64 },
    Create {
        campaign_id: i64,
        #[command(flatten)]
        payload: Payload,
    },
    Update {
        id: i64,
        #[command(flatten)]
        payload: Payload,
    },
    Delete { id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BusinessCommand {
    /// Validate and register a business
    Register(Payload),
    Details { member_id: String },
    AddMore(Payload),
    Update {
        member_id: String,
        #[command(flatten)]
        payload: Payload,
    },
    Accounts { user_id: i64 },
    Avatar { member_id: String },
    SetAvatar {
        id: i64,
        file: PathBuf,
        #[arg(long, default_value = "image/jpeg")]
        content_type: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum MemberCommand {
    Create(Payload),
    Delete { unique_id: String },
    List { business_id: i64 },
    Invite(Payload),
    Accept { unique_id: String },
    Pending { user_id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProductCommand {
    Create(Payload),
    Get { id: i64 },
    List { business_id: i64 },
    Search { business_id: i64, q: String },
    Delete { id: i64 },
}
