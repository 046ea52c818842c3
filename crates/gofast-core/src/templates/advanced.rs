//! Templates behind the advanced features

use super::Blob;

pub const RELEASE_WORKFLOW: Blob = blob!("advanced/workflow/release.yml.tmpl");
pub const TEST_WORKFLOW: Blob = blob!("advanced/workflow/go-test.yml.tmpl");
pub const RELEASER_CONFIG: Blob = blob!("advanced/workflow/goreleaser.yml.tmpl");

pub const DOCKERFILE: Blob = blob!("advanced/docker/Dockerfile.tmpl");
/// Application-only compose file, used when no driver brings its own
pub const DOCKER_COMPOSE: Blob = blob!("advanced/docker/docker-compose.yml.tmpl");

/// Shared websocket handler for the `net/http` based frameworks
pub const WEBSOCKET_HANDLER: Blob = blob!("advanced/websocket/handler.go.tmpl");

/// Frontend sources copied as-is over the Vite scaffold, relative to `frontend/`
pub const REACT_FILES: &[(&str, &str)] = &[
    (
        "vite.config.ts",
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/advanced/react/vite.config.ts"
        )),
    ),
    (
        "src/main.tsx",
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/advanced/react/main.tsx"
        )),
    ),
    (
        "src/styles.css",
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/advanced/react/styles.css"
        )),
    ),
];
