/// Use cases module containing application business logic orchestration
mod explain_installation;

pub use explain_installation::ExplainInstallationUseCase;
