/// Every variant aborts the whole unit of work it occurs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller does not hold the owner capability.
    Unauthorized,
    /// Attached native value left in this unit of work is below the tax.
    InsufficientPayment,
    /// The token refused the pull transfer (balance or allowance shortfall).
    TransferRejected,
    /// Tax computation left the representable range.
    ArithmeticOverflow,
    /// Floor price reported above the specified price.
    InvalidPrioritySignal,
    /// The host refused a native value transfer.
    NativeTransferFailed,
}
