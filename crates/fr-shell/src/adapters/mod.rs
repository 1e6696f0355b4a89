mod reload;

pub use reload::RemountSignal;
