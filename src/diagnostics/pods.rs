//! Pod readiness collection

use super::types::{PodHealth, PodRecord};
use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};
use tracing::debug;

/// Something that can list the pods of a namespace
#[async_trait]
pub trait PodSource: Send + Sync {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>>;
}

/// Pod source backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubePodSource {
    client: Client,
}

impl KubePodSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodSource for KubePodSource {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }
}

/// A pod is ready when its `Ready` condition is `True`
pub fn is_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .map(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Ready" && c.status == "True")
        })
        .unwrap_or(false)
}

/// Split pods into healthy and unhealthy, keeping listing order
pub fn partition_pods(pods: &[Pod], namespace: &str) -> PodHealth {
    let mut health = PodHealth::default();

    for pod in pods {
        let record = PodRecord {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: pod
                .metadata
                .namespace
                .clone()
                .unwrap_or_else(|| namespace.to_string()),
        };

        if is_ready(pod) {
            health.healthy.push(record);
        } else {
            health.unhealthy.push(record);
        }
    }

    health
}

/// List the pods of a namespace and partition them by readiness
pub async fn list_pod_health(source: &dyn PodSource, namespace: &str) -> Result<PodHealth> {
    let pods = source.list_pods(namespace).await?;
    let health = partition_pods(&pods, namespace);
    debug!(
        namespace,
        healthy = health.healthy.len(),
        unhealthy = health.unhealthy.len(),
        "Collected pod health"
    );
    Ok(health)
}
