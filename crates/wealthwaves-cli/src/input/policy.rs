use tracing::debug;
use wealthwaves_core::policy::EnginePolicy;

use super::file;

/// Engine policy from `--policy`, or the built-in defaults. A loaded policy
/// is validated before any command sees it.
pub fn load_policy(path: Option<&str>) -> Result<EnginePolicy, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        debug!("using default engine policy");
        return Ok(EnginePolicy::default());
    };
    debug!(path, "loading engine policy");
    let policy: EnginePolicy = file::read_structured(path)?;
    policy.validate()?;
    Ok(policy)
}
