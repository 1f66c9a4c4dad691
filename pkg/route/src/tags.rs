use std::collections::BTreeMap;

use pkg_constants::headers::{DEFAULT_ROUTE_HEADER_NAME, TAG_HEADER_NAME};
use pkg_constants::network::DEFAULT_TARGET;
use pkg_types::config::Defaults;
use pkg_types::ingress::{HTTPIngressPath, HeaderMatch};
use pkg_types::traffic::TrafficConfig;

use crate::path::make_base_path;

/// Layer tag-header routing onto the base path of target `name`.
///
/// For the default target, the base path is marked with the default-route
/// header and one header-matched path per tag is placed ahead of it.
/// For any other target, the base path is marked with its tag so requests
/// reaching it by hostname carry the same attribution as header-routed ones.
///
/// `names` must be sorted; the tag paths follow its order.
pub fn make_tag_routed_paths(
    name: &str,
    base: HTTPIngressPath,
    namespace: &str,
    traffic: &TrafficConfig,
    names: &[&str],
    defaults: &Defaults,
) -> Vec<HTTPIngressPath> {
    if name == DEFAULT_TARGET {
        let default_path = with_append_header(base, DEFAULT_ROUTE_HEADER_NAME, "true");
        let mut paths = make_tag_paths(namespace, traffic, names, defaults);
        paths.push(default_path);
        paths
    } else {
        vec![with_append_header(base, TAG_HEADER_NAME, name)]
    }
}

/// One path per non-default tag, matched on the tag header.
pub fn make_tag_paths(
    namespace: &str,
    traffic: &TrafficConfig,
    names: &[&str],
    defaults: &Defaults,
) -> Vec<HTTPIngressPath> {
    names
        .iter()
        .filter(|name| **name != DEFAULT_TARGET)
        .map(|name| {
            let targets = traffic
                .targets
                .get(*name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            HTTPIngressPath {
                headers: BTreeMap::from([(
                    TAG_HEADER_NAME.to_string(),
                    HeaderMatch {
                        exact: name.to_string(),
                    },
                )]),
                ..make_base_path(namespace, targets, defaults)
            }
        })
        .collect()
}

fn with_append_header(path: HTTPIngressPath, key: &str, value: &str) -> HTTPIngressPath {
    let mut append_headers = path.append_headers;
    append_headers.insert(key.to_string(), value.to_string());
    HTTPIngressPath {
        append_headers,
        ..path
    }
}
