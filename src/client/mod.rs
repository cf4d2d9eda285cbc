//! Kubernetes client abstraction

use crate::error::{HealError, Result};
use kube::{config::KubeConfigOptions, Client, Config};

/// Create a Kubernetes client for the specified context
///
/// An explicit context always reads the kubeconfig. Without one the usual
/// inference applies: local kubeconfig first, in-cluster service account second.
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = load_config(context).await?;
    Client::try_from(config).map_err(HealError::from)
}

/// Load Kubernetes configuration
async fn load_config(context: Option<&str>) -> Result<Config> {
    match context {
        Some(ctx) => {
            let options = KubeConfigOptions {
                context: Some(ctx.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .map_err(|e| HealError::Config(format!("Failed to load kubeconfig: {e}")))
        }
        None => Config::infer()
            .await
            .map_err(|e| HealError::Config(format!("Failed to infer kube config: {e}"))),
    }
}
