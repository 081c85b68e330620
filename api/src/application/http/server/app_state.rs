use std::sync::Arc;

use chefinbox_core::application::ChefInBoxService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChefInBoxService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefInBoxService) -> Self {
        Self { args, service }
    }
}
