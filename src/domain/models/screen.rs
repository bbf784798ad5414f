/// The three mutually exclusive input surfaces of the client. Transitions
/// are driven entirely by session operations; rendering only reads this.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    AwaitingInput,
    AwaitingDecision,
    AwaitingRefinementText,
}
