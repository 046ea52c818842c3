//! Per-framework templates

use super::Blob;
use crate::flags::Framework;

#[derive(Debug)]
pub struct FrameworkTemplates {
    /// Modules fetched with `go get -u`
    pub packages: &'static [&'static str],
    /// `cmd/api/main.go`
    pub main: Blob,
    /// `internal/server/server.go`
    pub server: Blob,
    /// `internal/server/routes.go`
    pub routes: Blob,
    /// `internal/server/routes_test.go`
    pub routes_test: Blob,
    /// Websocket module fetched when the websocket feature is on
    pub websocket_package: &'static str,
    /// Import lines spliced into `routes.go` for the websocket handler
    pub websocket_imports: Blob,
}

const CODER_WEBSOCKET: &str = "github.com/coder/websocket";

macro_rules! net_http {
    ($packages:expr, $routes:literal) => {
        FrameworkTemplates {
            packages: $packages,
            main: blob!("framework/main.go.tmpl"),
            server: blob!("framework/server.go.tmpl"),
            routes: blob!($routes),
            routes_test: blob!("framework/tests/routes_test.go.tmpl"),
            websocket_package: CODER_WEBSOCKET,
            websocket_imports: blob!("advanced/websocket/imports_standard.tmpl"),
        }
    };
}

static STANDARD_LIBRARY: FrameworkTemplates =
    net_http!(&[], "framework/routes/standard_library.go.tmpl");

static CHI: FrameworkTemplates =
    net_http!(&["github.com/go-chi/chi/v5"], "framework/routes/chi.go.tmpl");

static GIN: FrameworkTemplates =
    net_http!(&["github.com/gin-gonic/gin"], "framework/routes/gin.go.tmpl");

static GORILLA_MUX: FrameworkTemplates =
    net_http!(&["github.com/gorilla/mux"], "framework/routes/gorilla.go.tmpl");

static HTTP_ROUTER: FrameworkTemplates = net_http!(
    &["github.com/julienschmidt/httprouter"],
    "framework/routes/http_router.go.tmpl"
);

static ECHO: FrameworkTemplates = net_http!(
    &[
        "github.com/labstack/echo/v4",
        "github.com/labstack/echo/v4/middleware"
    ],
    "framework/routes/echo.go.tmpl"
);

// Fiber runs on fasthttp and brings its own server and websocket stack
static FIBER: FrameworkTemplates = FrameworkTemplates {
    packages: &["github.com/gofiber/fiber/v2"],
    main: blob!("framework/fiber_main.go.tmpl"),
    server: blob!("framework/fiber_server.go.tmpl"),
    routes: blob!("framework/routes/fiber.go.tmpl"),
    routes_test: blob!("framework/tests/fiber_routes_test.go.tmpl"),
    websocket_package: "github.com/gofiber/contrib/websocket",
    websocket_imports: blob!("advanced/websocket/imports_fiber.tmpl"),
};

pub fn framework_templates(framework: Framework) -> &'static FrameworkTemplates {
    match framework {
        Framework::StandardLibrary => &STANDARD_LIBRARY,
        Framework::Chi => &CHI,
        Framework::Gin => &GIN,
        Framework::Fiber => &FIBER,
        Framework::GorillaMux => &GORILLA_MUX,
        Framework::HttpRouter => &HTTP_ROUTER,
        Framework::Echo => &ECHO,
    }
}
