mod card;
mod deck;
mod tag;
