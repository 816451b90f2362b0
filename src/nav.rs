//! Screen stack - the navigation capability the two screens share

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one mounted screen instance.
///
/// Every push hands out a fresh id, so a fetch that outlives its screen can be
/// recognised when it completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountId(pub u64);

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters handed to the detail screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailParams {
    pub pokemon_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Pokedex,
    PokemonDetail(DetailParams),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Pokedex => "Pokedex",
            Route::PokemonDetail(_) => "PokemonDetail",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mounted {
    pub id: MountId,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStack {
    stack: Vec<Mounted>,
    next_id: u64,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Mounted {
                id: MountId(0),
                route: Route::Pokedex,
            }],
            next_id: 1,
        }
    }
}

impl NavStack {
    pub fn push(&mut self, route: Route) -> MountId {
        let id = MountId(self.next_id);
        self.next_id += 1;
        tracing::debug!(route = route.title(), mount = %id, "push screen");
        self.stack.push(Mounted { id, route });
        id
    }

    /// Pops the top screen. The root list screen stays put.
    pub fn pop(&mut self) -> Option<Mounted> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        if let Some(mounted) = &popped {
            tracing::debug!(route = mounted.route.title(), mount = %mounted.id, "pop screen");
        }
        popped
    }

    pub fn current(&self) -> &Mounted {
        // The root is never popped, so the stack is never empty.
        &self.stack[self.stack.len() - 1]
    }

    pub fn root(&self) -> MountId {
        self.stack[0].id
    }

    pub fn is_mounted(&self, id: MountId) -> bool {
        self.stack.iter().any(|mounted| mounted.id == id)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn on_detail(&self) -> bool {
        matches!(self.current().route, Route::PokemonDetail(_))
    }
}
