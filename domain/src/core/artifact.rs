//! Artifact type value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The infrastructure format a prompt targets (Value Object)
///
/// Selects the request payload `type` field and the extension of
/// downloaded output. The set is open: unknown names are carried as
/// [`ArtifactType::Other`] and passed to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    Kubernetes,
    Terraform,
    Dockerfile,
    Other(String),
}

impl ArtifactType {
    /// Get the wire identifier for this artifact type
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactType::Kubernetes => "kubernetes",
            ArtifactType::Terraform => "terraform",
            ArtifactType::Dockerfile => "dockerfile",
            ArtifactType::Other(s) => s,
        }
    }

    /// Artifact types offered by default in selectors
    pub fn builtin() -> Vec<ArtifactType> {
        vec![
            ArtifactType::Kubernetes,
            ArtifactType::Terraform,
            ArtifactType::Dockerfile,
        ]
    }

    /// Name of the file produced when downloading output of this type.
    ///
    /// Dockerfiles are saved under the literal name `Dockerfile`; every
    /// other type follows `{type}-output.{ext}`.
    pub fn output_file_name(&self) -> String {
        match self {
            ArtifactType::Dockerfile => "Dockerfile".to_string(),
            ArtifactType::Kubernetes => format!("{}-output.yaml", self.as_str()),
            ArtifactType::Terraform => format!("{}-output.tf", self.as_str()),
            ArtifactType::Other(_) => format!("{}-output.txt", self.as_str()),
        }
    }
}

impl Default for ArtifactType {
    /// Returns the default artifact type (Kubernetes)
    fn default() -> Self {
        ArtifactType::Kubernetes
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ArtifactType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "" => return Err(DomainError::InvalidArtifactType(s.to_string())),
            "kubernetes" | "k8s" => ArtifactType::Kubernetes,
            "terraform" | "tf" => ArtifactType::Terraform,
            "dockerfile" | "docker" => ArtifactType::Dockerfile,
            _ => ArtifactType::Other(normalized),
        })
    }
}

impl Serialize for ArtifactType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArtifactType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin_case_insensitive() {
        assert_eq!(
            "Kubernetes".parse::<ArtifactType>().unwrap(),
            ArtifactType::Kubernetes
        );
        assert_eq!(
            "TERRAFORM".parse::<ArtifactType>().unwrap(),
            ArtifactType::Terraform
        );
        assert_eq!(
            "dockerfile".parse::<ArtifactType>().unwrap(),
            ArtifactType::Dockerfile
        );
    }

    #[test]
    fn test_parse_other() {
        let artifact: ArtifactType = "Ansible".parse().unwrap();
        assert_eq!(artifact, ArtifactType::Other("ansible".to_string()));
        assert_eq!(artifact.to_string(), "ansible");
    }

    #[test]
    fn test_parse_blank_is_rejected() {
        assert!("  ".parse::<ArtifactType>().is_err());
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(
            ArtifactType::Kubernetes.output_file_name(),
            "kubernetes-output.yaml"
        );
        assert_eq!(
            ArtifactType::Terraform.output_file_name(),
            "terraform-output.tf"
        );
        assert_eq!(ArtifactType::Dockerfile.output_file_name(), "Dockerfile");
        assert_eq!(
            ArtifactType::Other("python".to_string()).output_file_name(),
            "python-output.txt"
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&ArtifactType::Terraform).unwrap();
        assert_eq!(json, "\"terraform\"");
        let parsed: ArtifactType = serde_json::from_str("\"dockerfile\"").unwrap();
        assert_eq!(parsed, ArtifactType::Dockerfile);
    }
}
