mod errors;
mod objects;
