mod completion;
mod followup;
mod think;

pub(crate) use completion::CompletionRequest;
pub(crate) use followup::FollowupRequest;
pub(crate) use think::ThinkRequest;
