mod export;
mod properties;
mod table;
