use log::info;

use crate::{
    api::quibble::QuibbleClient,
    config::command::{Command, CommunityArgs},
    error::ClientError,
    form::{LoginForm, RegisterForm},
    page::{CommunityPage, LandingPage, LoginPage, RegisterPage},
    post::{load_posts, Filter},
    route::{History, Navigator, Route},
    session::{Session, SessionStore},
};

/// What the client shows after a command: the page it ended on, that
/// page's view, and the failure of the action if there was one.
#[derive(Debug)]
pub struct Outcome {
    pub route: Route,
    pub view: String,
    pub error: Option<ClientError>,
}

impl Outcome {
    fn shown(route: Route, view: String) -> Self {
        Self {
            route,
            view,
            error: None,
        }
    }

    fn failed(route: Route, view: String, error: ClientError) -> Self {
        Self {
            route,
            view,
            error: Some(error),
        }
    }
}

/// Client state for one run: the backend client, the session handed to
/// every page, and the navigation history.
#[derive(Debug)]
pub struct App<S: SessionStore> {
    client: QuibbleClient,
    session: Session<S>,
    history: History,
}

impl<S: SessionStore> App<S> {
    pub fn new(client: QuibbleClient, session: Session<S>) -> Self {
        Self {
            client,
            session,
            history: History::default(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Opens the page for `command`, performs its action and follows any
    /// navigation it causes. A failed action stays on its page.
    pub async fn run(&mut self, command: Command) -> Outcome {
        let seen = self.history.entries().len();
        let route = command.route();
        info!("Opening {}", route);

        let outcome = match command {
            Command::Landing => Outcome::shown(route, LandingPage.render()),
            Command::Logout => match self.session.sign_out() {
                Ok(()) => {
                    self.history.replace(Route::Landing);
                    Outcome::shown(route, String::new())
                }
                Err(e) => Outcome::failed(route, String::new(), e),
            },
            Command::Login(args) => {
                let mut page = LoginPage::new(args.form(), args.next());
                match page
                    .submit(&self.client, &mut self.session, &mut self.history)
                    .await
                {
                    Ok(()) => Outcome::shown(route, String::new()),
                    Err(e) => Outcome::failed(route, page.render(), e),
                }
            }
            Command::Register(args) => {
                let mut page = RegisterPage::new(args.form());
                match page
                    .submit(&self.client, &mut self.session, &mut self.history)
                    .await
                {
                    Ok(()) => Outcome::shown(route, String::new()),
                    Err(e) => Outcome::failed(route, page.render(), e),
                }
            }
            Command::Community(args) => match self.community(Some(&args)) {
                Ok(view) => Outcome::shown(route, view),
                Err(e) => Outcome::failed(route, String::new(), e),
            },
        };

        self.follow(outcome, seen)
    }

    /// Mounts the feed; posts are only read once the gate lets the page in.
    fn community(&mut self, args: Option<&CommunityArgs>) -> Result<String, ClientError> {
        let mut page = CommunityPage::default();
        page.select(args.map(CommunityArgs::filter).unwrap_or(Filter::All));
        if page.mount(&self.session, &mut self.history) {
            if let Some(path) = args.and_then(CommunityArgs::posts) {
                page.set_posts(load_posts(path).map_err(ClientError::Posts)?);
            }
        }
        Ok(page.render())
    }

    fn follow(&mut self, mut outcome: Outcome, mut seen: usize) -> Outcome {
        if outcome.error.is_some() {
            return outcome;
        }

        while self.history.entries().len() > seen {
            seen = self.history.entries().len();
            let Some(navigation) = self.history.last() else {
                break;
            };
            let route = navigation.route();
            info!("-> {}", route);

            outcome.route = route;
            outcome.view = match route {
                Route::Landing => LandingPage.render(),
                Route::Login => LoginPage::new(LoginForm::default(), Route::Community).render(),
                Route::Register => RegisterPage::new(RegisterForm::default()).render(),
                Route::Community => match self.community(None) {
                    Ok(view) => view,
                    Err(e) => return Outcome::failed(route, String::new(), e),
                },
            };
        }
        outcome
    }
}
