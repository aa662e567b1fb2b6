use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::gateway::SharedGateway;
use crate::models::session_state::{SessionState, SubmitError};
use crate::models::slide::SlideStyle;
use crate::session::{SessionStore, csrf, deck_id, set_flash};
use crate::templates_structs::{IndexTemplate, PageContext, Tab};

#[derive(Deserialize)]
pub struct GenerateForm {
    pub csrf_token: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct VariantForm {
    pub csrf_token: String,
    pub index: String,
}

#[derive(Deserialize)]
pub struct StyleForm {
    pub csrf_token: String,
    pub style: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

/// Build the page for whatever phase the session is in.
fn index_template(ctx: PageContext, state: &SessionState) -> Result<IndexTemplate, AppError> {
    let selection = state.selection();

    let variant_tabs: Vec<Tab> = state
        .result()
        .map(|result| {
            (0..result.len())
                .map(|i| Tab {
                    value: i.to_string(),
                    label: (i + 1).to_string(),
                    active: i == selection.variant,
                })
                .collect()
        })
        .unwrap_or_default();

    let style_tabs: Vec<Tab> = SlideStyle::ALL
        .into_iter()
        .map(|style| Tab {
            value: style.as_str().to_string(),
            label: style.label().to_string(),
            active: style == selection.style,
        })
        .collect();

    let slide_html = match state.current_variant() {
        Some(variant) => selection.style.layout().render_html(variant)?,
        None => String::new(),
    };

    Ok(IndexTemplate {
        ctx,
        source: state.source().to_string(),
        is_loading: state.is_loading(),
        error: state.error().map(String::from),
        is_ready: state.result().is_some(),
        variant_tabs,
        style_tabs,
        slide_html,
    })
}

pub async fn index(
    store: web::Data<SessionStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let state = store.snapshot(&deck_id(&session));
    let ctx = PageContext::build(&session);
    render(index_template(ctx, &state)?)
}

pub async fn generate(
    store: web::Data<SessionStore>,
    gateway: web::Data<SharedGateway>,
    session: Session,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let deck = deck_id(&session);

    let begun = store.update(&deck, |state| {
        if !state.is_loading() {
            state.set_source(form.text.as_str());
        }
        state.begin_submit()
    });

    match begun {
        Ok(submission) => {
            // finish_submit must run even if the client goes away, so the call
            // is detached from the request. The store lock is not held across it.
            let store = store.into_inner();
            let gateway = gateway.into_inner();
            actix_web::rt::spawn(async move {
                let outcome = gateway.generate(&submission.text).await;
                let applied =
                    store.update(&deck, |state| state.finish_submit(submission.ticket, outcome));
                if !applied {
                    log::info!("Session was reset while generating; result discarded");
                }
            });
        }
        Err(SubmitError::EmptyInput) => {
            set_flash(&session, "Por favor, pega algo de texto de tu documento.");
        }
        Err(SubmitError::Busy) => {
            set_flash(&session, "Ya se están generando las diapositivas. Espera un momento.");
        }
    }

    Ok(redirect_home())
}

pub async fn select_variant(
    store: web::Data<SessionStore>,
    session: Session,
    form: web::Form<VariantForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match form.index.trim().parse::<usize>() {
        Ok(index) => store.update(&deck_id(&session), |state| state.select_variant(index)),
        Err(_) => log::debug!("Ignoring non-numeric variant index {:?}", form.index),
    }
    Ok(redirect_home())
}

pub async fn select_style(
    store: web::Data<SessionStore>,
    session: Session,
    form: web::Form<StyleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match form.style.parse::<SlideStyle>() {
        Ok(style) => store.update(&deck_id(&session), |state| state.select_style(style)),
        Err(e) => log::debug!("Ignoring style selection: {e}"),
    }
    Ok(redirect_home())
}

/// Also serves as the retry action after a failure.
pub async fn reset(
    store: web::Data<SessionStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    store.update(&deck_id(&session), SessionState::reset);
    Ok(redirect_home())
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
