use crate::error::CodecError;

/// Core trait for text codecs.
///
/// Every adapter shares the same compressed bit stream and differs only in
/// how that stream is laid out in its output alphabet:
/// 1.  `encode`: Take text and turn it into a packed payload.
/// 2.  `decode`: Take a packed payload and turn it back into the original text.
///
/// `Packed` is the borrowed form of the payload (`str`, `[u16]`, `[u8]`), so
/// `decode` accepts slices and `encode` hands back the owned counterpart.
pub trait Codec {
    type Packed: ?Sized + ToOwned;

    fn encode(&self, text: &str) -> <Self::Packed as ToOwned>::Owned;
    fn decode(&self, packed: &Self::Packed) -> Result<String, CodecError>;
}
