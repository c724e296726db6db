pub mod load;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Load(load::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action cannot be set up.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
