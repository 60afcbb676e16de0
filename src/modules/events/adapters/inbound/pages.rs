// Browser facing pages: home, submission form, and the form handler.
//
// Boundaries
// - The form handler goes through the same create operation as the JSON route.
// - Templates are named `*.html` so minijinja auto-escapes every interpolated value.

use axum::{
    Form,
    extract::State,
    extract::rejection::FormRejection,
    response::Html,
};
use minijinja::{Environment, context};

use crate::modules::events::adapters::inbound::error::HttpError;
use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

const HOME_TEMPLATE: &str = "home.html";
const FORM_TEMPLATE: &str = "form.html";
const ADDED_TEMPLATE: &str = "added.html";

const FORM_FIELDS: &[(&str, &str)] = &[
    ("title", "Título"),
    ("description", "Descrição"),
    ("date", "Data"),
    ("time", "Hora"),
    ("location", "Local"),
    ("cost", "Custo"),
];

/// Template environment, built once at startup.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(HOME_TEMPLATE, include_str!("templates/home.html"))?;
        env.add_template(FORM_TEMPLATE, include_str!("templates/form.html"))?;
        env.add_template(ADDED_TEMPLATE, include_str!("templates/added.html"))?;
        Ok(Self { env })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<Html<String>, HttpError> {
        let html = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(html))
    }
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    state.pages.render(
        HOME_TEMPLATE,
        context! { title => "Gerenciamento de Eventos" },
    )
}

pub async fn form(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    state
        .pages
        .render(FORM_TEMPLATE, context! { fields => FORM_FIELDS })
}

pub async fn submit(
    State(state): State<AppState>,
    body: Result<Form<Event>, FormRejection>,
) -> Result<Html<String>, HttpError> {
    let Form(event) = body?;
    let (id, event) = state.events.create(event).await?;
    state.pages.render(
        ADDED_TEMPLATE,
        context! { id, title => event.title },
    )
}
