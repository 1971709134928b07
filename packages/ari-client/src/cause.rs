//! Q.931 disconnect cause codes, as reported in `cause` fields.
//!
//! Lookup only. Events keep the raw integer and text they were sent; this table
//! gives a code a name.

macro_rules! hangup_causes {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// A known disconnect cause.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HangupCause {
            $($variant,)+
        }

        impl HangupCause {
            /// Every known cause, in ascending code order.
            pub const ALL: &'static [HangupCause] = &[$(HangupCause::$variant,)+];

            pub fn code(self) -> i32 {
                match self {
                    $(HangupCause::$variant => $code,)+
                }
            }

            /// `None` for codes outside the table (the numbering has gaps).
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(HangupCause::$variant),)+
                    _ => None,
                }
            }

            /// The `AST_CAUSE_*` constant name.
            pub fn name(self) -> &'static str {
                match self {
                    $(HangupCause::$variant => $name,)+
                }
            }
        }
    };
}

hangup_causes! {
    Unallocated = 1 => "AST_CAUSE_UNALLOCATED",
    NoRouteTransitNet = 2 => "AST_CAUSE_NO_ROUTE_TRANSIT_NET",
    NoRouteDestination = 3 => "AST_CAUSE_NO_ROUTE_DESTINATION",
    ChannelUnacceptable = 6 => "AST_CAUSE_CHANNEL_UNACCEPTABLE",
    CallAwardedDelivered = 7 => "AST_CAUSE_CALL_AWARDED_DELIVERED",
    NormalClearing = 16 => "AST_CAUSE_NORMAL_CLEARING",
    UserBusy = 17 => "AST_CAUSE_USER_BUSY",
    NoUserResponse = 18 => "AST_CAUSE_NO_USER_RESPONSE",
    NoAnswer = 19 => "AST_CAUSE_NO_ANSWER",
    CallRejected = 21 => "AST_CAUSE_CALL_REJECTED",
    NumberChanged = 22 => "AST_CAUSE_NUMBER_CHANGED",
    DestinationOutOfOrder = 27 => "AST_CAUSE_DESTINATION_OUT_OF_ORDER",
    InvalidNumberFormat = 28 => "AST_CAUSE_INVALID_NUMBER_FORMAT",
    FacilityRejected = 29 => "AST_CAUSE_FACILITY_REJECTED",
    ResponseToStatusEnquiry = 30 => "AST_CAUSE_RESPONSE_TO_STATUS_ENQUIRY",
    NormalUnspecified = 31 => "AST_CAUSE_NORMAL_UNSPECIFIED",
    NormalCircuitCongestion = 34 => "AST_CAUSE_NORMAL_CIRCUIT_CONGESTION",
    NetworkOutOfOrder = 38 => "AST_CAUSE_NETWORK_OUT_OF_ORDER",
    NormalTemporaryFailure = 41 => "AST_CAUSE_NORMAL_TEMPORARY_FAILURE",
    SwitchCongestion = 42 => "AST_CAUSE_SWITCH_CONGESTION",
    AccessInfoDiscarded = 43 => "AST_CAUSE_ACCESS_INFO_DISCARDED",
    RequestedChanUnavail = 44 => "AST_CAUSE_REQUESTED_CHAN_UNAVAIL",
    PreEmpted = 45 => "AST_CAUSE_PRE_EMPTED",
    FacilityNotSubscribed = 50 => "AST_CAUSE_FACILITY_NOT_SUBSCRIBED",
    OutgoingCallBarred = 52 => "AST_CAUSE_OUTGOING_CALL_BARRED",
    IncomingCallBarred = 54 => "AST_CAUSE_INCOMING_CALL_BARRED",
    BearerCapabilityNotAuth = 57 => "AST_CAUSE_BEARERCAPABILITY_NOTAUTH",
    BearerCapabilityNotAvail = 58 => "AST_CAUSE_BEARERCAPABILITY_NOTAVAIL",
    BearerCapabilityNotImpl = 65 => "AST_CAUSE_BEARERCAPABILITY_NOTIMPL",
    ChanNotImplemented = 66 => "AST_CAUSE_CHAN_NOT_IMPLEMENTED",
    FacilityNotImplemented = 69 => "AST_CAUSE_FACILITY_NOT_IMPLEMENTED",
    InvalidCallReference = 81 => "AST_CAUSE_INVALID_CALL_REFERENCE",
    IncompatibleDestination = 88 => "AST_CAUSE_INCOMPATIBLE_DESTINATION",
    InvalidMsgUnspecified = 95 => "AST_CAUSE_INVALID_MSG_UNSPECIFIED",
    MandatoryIeMissing = 96 => "AST_CAUSE_MANDATORY_IE_MISSING",
    MessageTypeNonexist = 97 => "AST_CAUSE_MESSAGE_TYPE_NONEXIST",
    WrongMessage = 98 => "AST_CAUSE_WRONG_MESSAGE",
    IeNonexist = 99 => "AST_CAUSE_IE_NONEXIST",
    InvalidIeContents = 100 => "AST_CAUSE_INVALID_IE_CONTENTS",
    WrongCallState = 101 => "AST_CAUSE_WRONG_CALL_STATE",
    RecoveryOnTimerExpire = 102 => "AST_CAUSE_RECOVERY_ON_TIMER_EXPIRE",
    MandatoryIeLengthError = 103 => "AST_CAUSE_MANDATORY_IE_LENGTH_ERROR",
    ProtocolError = 111 => "AST_CAUSE_PROTOCOL_ERROR",
    Interworking = 127 => "AST_CAUSE_INTERWORKING",
}

impl std::fmt::Display for HangupCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
