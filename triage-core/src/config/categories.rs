//! Fixed mapping from report section categories to AWS service titles.

use serde::{Deserialize, Serialize};

/// One category section: a display name plus the service titles it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub services: Vec<String>,
}

/// Ordered category → service mapping used to section the summary tables.
/// Declaration order is the order sections appear in the report.
#[derive(Debug, Clone)]
pub struct ServiceCategories {
    entries: Vec<Category>,
}

impl ServiceCategories {
    /// The built-in AWS service grouping.
    pub fn builtin() -> Self {
        let entries = [
            (
                "Security and Identity",
                &["IAM", "ACM", "KMS", "GuardDuty", "Secret Manager", "Secret Hub", "SSM"][..],
            ),
            (
                "Compute",
                &["Auto Scaling", "EC2", "ECS", "EKS", "Lambda", "EMR", "Step Functions"][..],
            ),
            ("Storage", &["EBS", "ECR", "S3", "DLM", "Backup"][..]),
            (
                "Network",
                &["API Gateway", "CloudFront", "Route 53", "VPC", "ELB", "ElasticCache", "CloudTrail"][..],
            ),
            ("Database", &["RDS", "DynamoDB", "Athena", "Glue"][..]),
            (
                "Other",
                &["CloudFormation", "CodeDeploy", "Config", "SNS", "SQS", "WorkSpaces", "EventBridge"][..],
            ),
        ]
        .iter()
        .map(|(name, services)| Category {
            name: name.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

        Self { entries }
    }

    pub fn from_entries(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Category {
    pub fn contains(&self, service_title: &str) -> bool {
        self.services.iter().any(|s| s == service_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let cats = ServiceCategories::builtin();
        let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Security and Identity",
                "Compute",
                "Storage",
                "Network",
                "Database",
                "Other"
            ]
        );
    }

    #[test]
    fn membership_is_exact() {
        let cats = ServiceCategories::builtin();
        let compute = cats.iter().find(|c| c.name == "Compute").unwrap();
        assert!(compute.contains("EC2"));
        assert!(!compute.contains("ec2"));
        assert!(!compute.contains("S3"));
    }
}
