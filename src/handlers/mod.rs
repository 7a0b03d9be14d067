// handlers/mod.rs - Two handler tiers
//
// Public (no auth): service descriptor and health probe
// Protected (bearer token): everything under /api/*

pub mod protected;
pub mod public;
