pub mod referral;
pub mod waitlist;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    waitlist::configure(cfg);
    referral::configure(cfg);
}
