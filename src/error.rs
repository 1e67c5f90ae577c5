use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window is available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),
    #[error("failed to {action}: {detail}")]
    Dom {
        action: &'static str,
        detail: String,
    },
}

impl PageError {
    pub fn dom(action: &'static str, detail: impl Into<String>) -> Self {
        Self::Dom {
            action,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_error_names_the_failed_action() {
        let err = PageError::dom("add scroll listener", "TypeError");
        assert_eq!(err.to_string(), "failed to add scroll listener: TypeError");
    }

    #[test]
    fn missing_mount_point_reports_the_element_id() {
        assert_eq!(
            PageError::MissingMountPoint("app").to_string(),
            "missing #app mount point"
        );
    }
}
