//! Central constants for the explorer application

/// Default values for GitHub operations
pub mod github {
    /// GitHub GraphQL endpoint
    pub const API_ENDPOINT: &str = explorer_github::DEFAULT_ENDPOINT;

    /// Environment variable consulted for the token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Number of issues shown on the repository page
    pub const ISSUE_LIMIT: usize = 5;
}

/// Default values for the local store
pub mod storage {
    /// Key under which searched repositories are stored
    pub const REPOSITORIES_KEY: &str = "@GithubExplorer:repositories";

    /// Directory (under the home directory) holding the store file
    pub const DEFAULT_STORAGE_DIR: &str = ".github-explorer";

    /// Store file name
    pub const DEFAULT_STORAGE_FILE: &str = "local-storage.json";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "explorer.yaml";
}

/// User-facing messages
pub mod messages {
    pub const TITLE: &str = "Explore repositórios no Github";
    pub const EMPTY_INPUT: &str = "Digite autor/nome do repositório";
    pub const NOT_FOUND: &str = "Repositório não encontrado";
    pub const DETAIL_ERROR: &str = "Error! Repositório não encontrado";
    pub const LOADING: &str = "Loading...";
    pub const BACK: &str = "Voltar";
}
