//! Server harness and shared world for sign-in integration suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` stops the server
//! even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use awc::Client;
use serde_json::Value;
use signin::domain::ports::{SignInService, UserRepository};
use signin::domain::{SignInServiceImpl, TRACE_ID_HEADER};
use signin::inbound::http::json_config;
use signin::inbound::http::sign_in::sign_in as sign_in_handler;
use signin::inbound::http::state::HttpState;
use signin::middleware::{ForceUtf8, Trace};
use signin::outbound::persistence::StubUserRepository;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use crate::doubles::RecordingUserRepository;

/// Snapshot of one `POST /sign-in` exchange.
#[derive(Debug, Clone)]
pub(crate) struct SignInResponse {
    pub(crate) status: u16,
    pub(crate) content_type: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

pub(crate) struct ServerWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: Option<String>,
    pub(crate) server: Option<ServerHandle>,
    pub(crate) recorder: Option<RecordingUserRepository>,
    pub(crate) last_response: Option<SignInResponse>,
}

pub(crate) type SharedWorld = Rc<RefCell<ServerWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(&self.world);
    }
}

/// Build an idle world; call [`start_server`] or [`start_stub_server`] next.
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let world = Rc::new(RefCell::new(ServerWorld {
        runtime,
        local: LocalSet::new(),
        base_url: None,
        server: None,
        recorder: None,
        last_response: None,
    }));
    WorldFixture { world }
}

fn shutdown(world: &SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so the world stays
    // borrowed during `block_on`. The future must not touch the world.
    let ctx = world.borrow();
    let Some(server) = ctx.server.clone() else {
        return;
    };
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone().expect("server should be started first");
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn spawn_server(
    port: Arc<dyn SignInService>,
    force_utf8: bool,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(HttpState::new(port));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(json_config())
            .wrap(actix_web::middleware::Condition::new(force_utf8, ForceUtf8))
            .wrap(Trace)
            .service(sign_in_handler)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

/// Start a server over `repository` through the real sign-in service.
pub(crate) fn start_server<R>(world: &SharedWorld, repository: R, force_utf8: bool)
where
    R: UserRepository + 'static,
{
    let port: Arc<dyn SignInService> = Arc::new(SignInServiceImpl::new(Arc::new(repository)));
    let started = {
        let ctx = world.borrow();
        ctx.local
            .block_on(&ctx.runtime, async { spawn_server(port, force_utf8).await })
            .expect("server should start")
    };
    let (base_url, server) = started;
    let mut ctx = world.borrow_mut();
    ctx.base_url = Some(base_url);
    ctx.server = Some(server);
}

/// Start a server over a recording repository kept in the world.
pub(crate) fn start_recorded_server(world: &SharedWorld, repository: RecordingUserRepository) {
    world.borrow_mut().recorder = Some(repository.clone());
    start_server(world, repository, true);
}

/// Start a server wired to the stub repository, as the binary does.
pub(crate) fn start_stub_server(world: &SharedWorld) {
    start_server(world, StubUserRepository, true);
}

/// POST `body` to `/sign-in` with the given content type and record the reply.
pub(crate) fn post_sign_in(
    world: &SharedWorld,
    body: impl Into<String>,
    content_type: &'static str,
) -> SignInResponse {
    let body = body.into();
    let response = with_world_async(world, |base_url| async move {
        let mut response = Client::default()
            .post(format!("{base_url}/sign-in"))
            .insert_header((header::CONTENT_TYPE, content_type))
            .send_body(body)
            .await
            .expect("sign-in request");
        let header_text = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned)
        };
        let status = response.status().as_u16();
        let content_type = header_text(header::CONTENT_TYPE.as_str());
        let trace_id = header_text(TRACE_ID_HEADER);
        let bytes = response.body().await.expect("sign-in body");
        let body: Value = serde_json::from_slice(&bytes).expect("sign-in JSON body");
        SignInResponse {
            status,
            content_type,
            trace_id,
            body,
        }
    });
    world.borrow_mut().last_response = Some(response.clone());
    response
}
