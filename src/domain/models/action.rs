pub enum Action {
    SubmitPrompt(String),
}
