use crate::data::ticket::{Reservation, TicketRegistry};
use serenity::all::{ChannelId, UserId};

mod open;
mod rebuild;
mod reserve;

const REQUESTER: UserId = UserId::new(10);
const OTHER_REQUESTER: UserId = UserId::new(11);
const CHANNEL: ChannelId = ChannelId::new(500);
const OTHER_CHANNEL: ChannelId = ChannelId::new(501);
