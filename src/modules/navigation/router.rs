/// Pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageKind,
}

/// Static route table. The CV site has exactly one route: `/`.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: vec![Route {
                path: "/",
                page: PageKind::Cv,
            }],
        }
    }
}

impl Router {
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Exact path match; query string and fragment are ignored.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        self.routes.iter().find(|route| route.path == path)
    }
}
