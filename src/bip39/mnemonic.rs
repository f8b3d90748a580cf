use super::MnemonicErr;
use ::bip39::{
    Language,
    Mnemonic as Bip39Mnemonic
};

pub const MIN_WORDS: usize = 12;

pub struct Mnemonic {
    phrase: Vec<String>,  //The normalised words
    seed: [u8; 64]        //The seed key (512 bits)
}

impl Mnemonic {
    /**
        Parses a phrase and derives its seed with the given passphrase.

        The phrase is trimmed, split on any whitespace and lowercased.
        Checks in order: word count, word list membership, checksum.
    */
    pub fn from_phrase(phrase: &str, passphrase: &str) -> Result<Self, MnemonicErr> {
        let words: Vec<String> = phrase.split_whitespace().map(|x| x.to_lowercase()).collect();
        if words.len() < MIN_WORDS { return Err(MnemonicErr::TooFewWords(words.len())) }

        let word_list = Language::English.word_list();
        let invalid: Vec<String> = words.iter()
            .filter(|x| !word_list.contains(&x.as_str()))
            .cloned()
            .collect();
        if !invalid.is_empty() { return Err(MnemonicErr::InvalidWords(invalid)) }

        let parsed = Bip39Mnemonic::parse_normalized(&words.join(" "))?;
        let seed = parsed.to_seed(passphrase);

        Ok(Self {
            phrase: words,
            seed
        })
    }

    pub fn seed(&self) -> [u8; 64] {
        self.seed
    }

    pub fn word_count(&self) -> usize {
        self.phrase.len()
    }

    /**
        Returns the normalised phrase, words separated by single spaces.
    */
    pub fn phrase(&self) -> String {
        self.phrase.join(" ")
    }
}
