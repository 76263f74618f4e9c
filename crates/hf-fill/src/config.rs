use hf_core::EdgePolicy;
use serde::{Deserialize, Serialize};

use crate::{Connectivity, FillError, WeightKernel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Distance exponent; larger values favor the nearest boundary pixels.
    pub z: f64,
    /// Keeps the weight finite at zero distance.
    pub epsilon: f64,
    pub connectivity: Connectivity,
    pub edge_policy: EdgePolicy,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            z: 3.0,
            epsilon: 0.01,
            connectivity: Connectivity::Eight,
            edge_policy: EdgePolicy::Skip,
        }
    }
}

impl FillConfig {
    pub fn new(z: f64, epsilon: f64, connectivity: Connectivity) -> Self {
        Self {
            z,
            epsilon,
            connectivity,
            ..Self::default()
        }
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Checks every parameter and returns the kernel the fill will use.
    pub fn kernel(&self) -> Result<WeightKernel, FillError> {
        WeightKernel::new(self.z, self.epsilon)
    }

    pub fn validate(&self) -> Result<(), FillError> {
        self.kernel().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use hf_core::EdgePolicy;

    use super::FillConfig;
    use crate::{Connectivity, FillError};

    #[test]
    fn default_is_valid() {
        let cfg = FillConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.edge_policy, EdgePolicy::Skip);
    }

    #[test]
    fn zero_epsilon_is_rejected() {
        let cfg = FillConfig::new(2.0, 0.0, Connectivity::Four);
        assert_eq!(cfg.validate(), Err(FillError::InvalidEpsilon(0.0)));
        assert!(cfg.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn builder_keeps_kernel_parameters() {
        let cfg =
            FillConfig::new(2.0, 0.1, Connectivity::Four).with_edge_policy(EdgePolicy::Clamp);
        let k = cfg.kernel().expect("valid config");
        assert_eq!(k.z(), 2.0);
        assert_eq!(k.epsilon(), 0.1);
        assert_eq!(cfg.edge_policy, EdgePolicy::Clamp);
    }
}
