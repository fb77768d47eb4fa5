/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables endpoint (nested under a workspace)
    pub const VARS: &str = "vars";

    /// Policy sets endpoint
    pub const POLICY_SETS: &str = "policy-sets";

    /// OAuth clients endpoint
    pub const OAUTH_CLIENTS: &str = "oauth-clients";

    /// Page size for list requests (only the first page is read)
    pub const LIST_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TF_TOKEN", "TFE_TOKEN", "TFC_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Environment variable for the host
    pub const HOST_ENV_VAR: &str = "TFE_HOSTNAME";

    /// Environment variable for the organization
    pub const ORG_ENV_VAR: &str = "TF_ORG";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
