//! Static site content: company details, pricing tables and portfolio.

pub mod company;
pub mod portfolio;
pub mod pricing;
