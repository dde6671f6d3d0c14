pub mod nbp;
pub mod nbp_dto;
