use std::collections::BTreeMap;

use pkg_constants::headers::{REVISION_HEADER_NAME, REVISION_HEADER_NAMESPACE};
use pkg_types::config::Defaults;
use pkg_types::ingress::{HTTPIngressPath, IngressBackend, IngressBackendSplit};
use pkg_types::traffic::RevisionTarget;

/// Build the path carrying the weighted splits of one traffic target.
///
/// Targets without traffic are skipped; if every target is skipped the
/// path has no splits. The timeout is only set when some surviving target
/// asks for more than the default revision timeout.
pub fn make_base_path(
    namespace: &str,
    targets: &[RevisionTarget],
    defaults: &Defaults,
) -> HTTPIngressPath {
    let live: Vec<&RevisionTarget> = targets.iter().filter(|t| t.has_traffic()).collect();

    let splits = live
        .iter()
        .map(|t| make_split(namespace, t))
        .collect();

    HTTPIngressPath {
        splits,
        timeout: resolve_timeout(&live, defaults),
        ..Default::default()
    }
}

fn make_split(namespace: &str, target: &RevisionTarget) -> IngressBackendSplit {
    let append_headers = BTreeMap::from([
        (
            REVISION_HEADER_NAME.to_string(),
            target.revision_name.clone(),
        ),
        (REVISION_HEADER_NAMESPACE.to_string(), namespace.to_string()),
    ]);

    IngressBackendSplit {
        backend: IngressBackend {
            service_namespace: namespace.to_string(),
            service_name: target.service_name.clone(),
            service_port: target.protocol.service_port(),
        },
        percent: target.percent.unwrap_or_default(),
        append_headers,
    }
}

/// Largest target timeout, but only if it strictly exceeds the default.
/// A timeout equal to the default is left for the proxy to apply.
fn resolve_timeout(
    targets: &[&RevisionTarget],
    defaults: &Defaults,
) -> Option<std::time::Duration> {
    let default = defaults.revision_timeout();
    targets
        .iter()
        .filter_map(|t| t.timeout)
        .filter(|timeout| *timeout > default)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_target, make_timed_target};
    use pkg_types::traffic::Protocol;
    use std::time::Duration;

    fn make_defaults(secs: u64) -> Defaults {
        Defaults {
            revision_timeout_seconds: secs,
        }
    }

    #[test]
    fn test_splits_keep_order_and_percent() {
        let targets = vec![
            make_target("rev-c", Some(20)),
            make_target("rev-a", Some(50)),
            make_target("rev-b", Some(30)),
        ];
        let path = make_base_path("prod", &targets, &make_defaults(30));

        let names: Vec<&str> = path
            .splits
            .iter()
            .map(|s| s.backend.service_name.as_str())
            .collect();
        assert_eq!(names, vec!["rev-c", "rev-a", "rev-b"]);
        let percents: Vec<u32> = path.splits.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![20, 50, 30]);
        assert!(path.headers.is_empty());
        assert!(path.append_headers.is_empty());
        assert!(path.path.is_none());
    }

    #[test]
    fn test_skips_targets_without_traffic() {
        let targets = vec![
            make_target("rev-a", None),
            make_target("rev-b", Some(0)),
            make_target("rev-c", Some(100)),
        ];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert_eq!(path.splits.len(), 1);
        assert_eq!(path.splits[0].backend.service_name, "rev-c");
    }

    #[test]
    fn test_all_skipped_yields_empty_path() {
        let targets = vec![make_target("rev-a", Some(0)), make_target("rev-b", None)];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert!(path.splits.is_empty());
        assert!(path.timeout.is_none());
    }

    #[test]
    fn test_split_backend_and_headers() {
        let mut target = make_target("rev-a", Some(100));
        target.service_name = "rev-a-private".to_string();
        target.protocol = Protocol::H2c;
        let path = make_base_path("prod", &[target], &make_defaults(30));

        let split = &path.splits[0];
        assert_eq!(split.backend.service_namespace, "prod");
        assert_eq!(split.backend.service_name, "rev-a-private");
        assert_eq!(split.backend.service_port, 81);
        assert_eq!(
            split.append_headers.get("Knative-Serving-Revision"),
            Some(&"rev-a".to_string())
        );
        assert_eq!(
            split.append_headers.get("Knative-Serving-Namespace"),
            Some(&"prod".to_string())
        );
        assert_eq!(split.append_headers.len(), 2);
    }

    #[test]
    fn test_timeouts_below_default_not_emitted() {
        let targets = vec![
            make_timed_target("rev-a", 40, 5),
            make_timed_target("rev-b", 30, 20),
            make_timed_target("rev-c", 30, 15),
        ];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert!(path.timeout.is_none());
    }

    #[test]
    fn test_timeout_above_default_emitted() {
        let targets = vec![
            make_timed_target("rev-a", 50, 5),
            make_timed_target("rev-b", 50, 40),
        ];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert_eq!(path.timeout, Some(Duration::from_secs(40)));
    }

    #[test]
    fn test_timeout_equal_to_default_not_emitted() {
        let targets = vec![make_timed_target("rev-a", 100, 30)];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert!(path.timeout.is_none());
    }

    #[test]
    fn test_timeout_of_skipped_target_ignored() {
        let idle = make_timed_target("rev-a", 0, 90);
        let targets = vec![idle, make_timed_target("rev-b", 100, 45)];
        let path = make_base_path("prod", &targets, &make_defaults(30));
        assert_eq!(path.timeout, Some(Duration::from_secs(45)));
    }
}
