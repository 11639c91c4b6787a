pub mod stage1_profile;
pub mod stage2_complete;
pub mod stage3_rank;
pub mod stage4_assemble;
pub mod stage5_report;
