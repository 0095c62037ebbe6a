/// Use cases module containing application logic orchestration
mod depend_info;

pub use depend_info::DependInfoUseCase;
