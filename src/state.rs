use std::sync::Arc;
use crate::domain::ports::{
    CouponRepository, DonationRepository, EventRepository, FamilyMemberRepository,
    RegistrationRepository, TicketRepository, UserRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub ticket_repo: Arc<dyn TicketRepository>,
    pub coupon_repo: Arc<dyn CouponRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
    pub family_repo: Arc<dyn FamilyMemberRepository>,
    pub donation_repo: Arc<dyn DonationRepository>,
}
