pub mod get_cards;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_cards::GetCardsUseCase;
