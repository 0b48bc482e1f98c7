mod grant;
mod ticket;
