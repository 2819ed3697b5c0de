use std::fmt;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`, defaulting to `local`.
    pub fn from_env() -> Result<Self, String> {
        std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".to_string())
            .try_into()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    /// Base name of the optional settings file for this environment.
    pub fn settings_file(&self) -> String {
        format!("appsettings.{}", self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
