//! Payload layouts of the built-in messages, one table per mode.
//!
//! Field names follow the u-blox interface description. Reserved bytes are
//! kept as fields so the layout always covers the whole payload.

use crate::{
    schema::{
        BitPart::{Bit, Gap},
        PayloadSchema,
        Repeat::{Count, Rest},
        SchemaItem::{self, Bits, CfgData, Field, Group, Tail},
    },
    value::{
        Elem,
        TypeTag::{A, C, E1, E2, I1, I2, I4, U1, U2, U4, X},
    },
};

const EMPTY: PayloadSchema = PayloadSchema::new(&[]);

const ACK: PayloadSchema = PayloadSchema::new(&[Field("clsID", U1), Field("msgID", U1)]);

const CFG_MSG: PayloadSchema = PayloadSchema::new(&[
    Field("msgClass", U1),
    Field("msgID", U1),
    Field("rateDDC", U1),
    Field("rateUART1", U1),
    Field("rateUART2", U1),
    Field("rateUSB", U1),
    Field("rateSPI", U1),
    Field("reserved", U1),
]);

const CFG_PRT: PayloadSchema = PayloadSchema::new(&[
    Field("portID", U1),
    Field("reserved0", U1),
    Bits(2, &[Bit("en", 1), Bit("pol", 1), Bit("pin", 5), Bit("thres", 9)]),
    Bits(
        4,
        &[
            Gap(6),
            Bit("charLen", 2),
            Gap(1),
            Bit("parity", 3),
            Bit("nStopBits", 2),
            Gap(18),
        ],
    ),
    Field("baudRate", U4),
    Bits(
        2,
        &[
            Bit("inUBX", 1),
            Bit("inNMEA", 1),
            Bit("inRTCM", 1),
            Gap(2),
            Bit("inRTCM3", 1),
            Gap(10),
        ],
    ),
    Bits(
        2,
        &[Bit("outUBX", 1), Bit("outNMEA", 1), Gap(3), Bit("outRTCM3", 1), Gap(10)],
    ),
    Bits(2, &[Gap(1), Bit("extendedTxTimeout", 1), Gap(14)]),
    Field("reserved5", U2),
]);

const CFG_INF: PayloadSchema = PayloadSchema::new(&[Group(
    Rest,
    &[
        Field("protocolID", U1),
        Field("reserved0", U1),
        Field("reserved1", U2),
        Field("infMsgMaskDDC", X(1)),
        Field("infMsgMaskUART1", X(1)),
        Field("infMsgMaskUART2", X(1)),
        Field("infMsgMaskUSB", X(1)),
        Field("infMsgMaskSPI", X(1)),
        Field("reserved2", X(1)),
    ],
)]);

const CFG_RATE: PayloadSchema = PayloadSchema::new(&[
    Field("measRate", U2),
    Field("navRate", U2),
    Field("timeRef", E2),
]);

const CFG_NAV5: PayloadSchema = PayloadSchema::new(&[
    Bits(
        2,
        &[
            Bit("dyn", 1),
            Bit("minEl", 1),
            Bit("posFixMode", 1),
            Bit("drLim", 1),
            Bit("posMask", 1),
            Bit("timeMask", 1),
            Bit("staticHoldMask", 1),
            Bit("dgpsMask", 1),
            Bit("cnoThreshold", 1),
            Gap(1),
            Bit("utc", 1),
            Gap(5),
        ],
    ),
    Field("dynModel", E1),
    Field("fixMode", E1),
    Field("fixedAlt", I4),
    Field("fixedAltVar", U4),
    Field("minElev", I1),
    Field("drLimit", U1),
    Field("pDop", U2),
    Field("tDop", U2),
    Field("pAcc", U2),
    Field("tAcc", U2),
    Field("staticHoldThresh", U1),
    Field("dgnssTimeout", U1),
    Field("cnoThreshNumSVs", U1),
    Field("cnoThresh", U1),
    Field("reserved0", U2),
    Field("staticHoldMaxDist", U2),
    Field("utcStandard", E1),
    Field("reserved1", A(Elem::U1, 5)),
]);

const CFG_GNSS: PayloadSchema = PayloadSchema::new(&[
    Field("msgVer", U1),
    Field("numTrkChHw", U1),
    Field("numTrkChUse", U1),
    Field("numConfigBlocks", U1),
    Group(
        Count("numConfigBlocks"),
        &[
            Field("gnssId", U1),
            Field("resTrkCh", U1),
            Field("maxTrkCh", U1),
            Field("reserved1", U1),
            Bits(4, &[Bit("enable", 1), Gap(15), Bit("sigCfMask", 8), Gap(8)]),
        ],
    ),
]);

const CFG_RST: PayloadSchema = PayloadSchema::new(&[
    Bits(
        2,
        &[
            Bit("eph", 1),
            Bit("alm", 1),
            Bit("health", 1),
            Bit("klob", 1),
            Bit("pos", 1),
            Bit("clkd", 1),
            Bit("osc", 1),
            Bit("utc", 1),
            Bit("rtc", 1),
            Gap(6),
            Bit("aop", 1),
        ],
    ),
    Field("resetMode", U1),
    Field("reserved0", U1),
]);

macro_rules! cfg_mask {
    ($($bit:literal),*) => {
        SchemaItem::Bits(4, &[
            $(Bit($bit, 1),)*
        ])
    };
}

const CFG_CFG: PayloadSchema = PayloadSchema::new(&[
    cfg_mask!(
        "clearIoPort", "clearMsgConf", "clearInfMsg", "clearNavConf", "clearRxmConf"
    ),
    cfg_mask!("saveIoPort", "saveMsgConf", "saveInfMsg", "saveNavConf", "saveRxmConf"),
    cfg_mask!("loadIoPort", "loadMsgConf", "loadInfMsg", "loadNavConf", "loadRxmConf"),
    Bits(
        1,
        &[
            Bit("devBBR", 1),
            Bit("devFlash", 1),
            Bit("devEEPROM", 1),
            Gap(1),
            Bit("devSpiFlash", 1),
            Gap(3),
        ],
    ),
]);

const CFG_VALSET: PayloadSchema = PayloadSchema::new(&[
    Field("version", U1),
    Bits(1, &[Bit("ram", 1), Bit("bbr", 1), Bit("flash", 1), Gap(5)]),
    Bits(1, &[Bit("action", 2), Gap(6)]),
    Field("reserved0", U1),
    CfgData,
]);

const CFG_VALDEL: PayloadSchema = PayloadSchema::new(&[
    Field("version", U1),
    Bits(1, &[Gap(1), Bit("bbr", 1), Bit("flash", 1), Gap(5)]),
    Bits(1, &[Bit("action", 2), Gap(6)]),
    Field("reserved0", U1),
    Group(Rest, &[Field("keys", U4)]),
]);

const CFG_VALGET_POLL: PayloadSchema = PayloadSchema::new(&[
    Field("version", U1),
    Field("layer", U1),
    Field("position", U2),
    Group(Rest, &[Field("keys", U4)]),
]);

const CFG_VALGET: PayloadSchema = PayloadSchema::new(&[
    Field("version", U1),
    Field("layer", U1),
    Field("position", U2),
    CfgData,
]);

const INF: PayloadSchema = PayloadSchema::new(&[Tail("message")]);

const MON_HW: PayloadSchema = PayloadSchema::new(&[
    Field("pinSel", X(4)),
    Field("pinBank", X(4)),
    Field("pinDir", X(4)),
    Field("pinVal", X(4)),
    Field("noisePerMS", U2),
    Field("agcCnt", U2),
    Field("aStatus", U1),
    Field("aPower", U1),
    Bits(
        1,
        &[
            Bit("rtcCalib", 1),
            Bit("safeBoot", 1),
            Bit("jammingState", 2),
            Bit("xtalAbsent", 1),
            Gap(3),
        ],
    ),
    Field("reserved1", U1),
    Field("usedMask", X(4)),
    Field("VP", A(Elem::U1, 17)),
    Field("jamInd", U1),
    Field("reserved2", U2),
    Field("pinIrq", X(4)),
    Field("pullH", X(4)),
    Field("pullL", X(4)),
]);

const MON_IO: PayloadSchema = PayloadSchema::new(&[Group(
    Rest,
    &[
        Field("rxBytes", U4),
        Field("txBytes", U4),
        Field("parityErrs", U2),
        Field("framingErrs", U2),
        Field("overrunErrs", U2),
        Field("breakCond", U2),
        Field("rxBusy", U1),
        Field("txBusy", U1),
        Field("reserved1", U2),
    ],
)]);

const MON_MSGPP: PayloadSchema = PayloadSchema::new(&[
    Field("msg1", A(Elem::U2, 8)),
    Field("msg2", A(Elem::U2, 8)),
    Field("msg3", A(Elem::U2, 8)),
    Field("msg4", A(Elem::U2, 8)),
    Field("msg5", A(Elem::U2, 8)),
    Field("msg6", A(Elem::U2, 8)),
    Field("skipped", A(Elem::U4, 6)),
]);

const MON_RXBUF: PayloadSchema = PayloadSchema::new(&[
    Field("pending", A(Elem::U2, 6)),
    Field("usage", A(Elem::U1, 6)),
    Field("peakUsage", A(Elem::U1, 6)),
]);

const MON_TXBUF: PayloadSchema = PayloadSchema::new(&[
    Field("pending", A(Elem::U2, 6)),
    Field("usage", A(Elem::U1, 6)),
    Field("peakUsage", A(Elem::U1, 6)),
    Field("tUsage", U1),
    Field("tPeakusage", U1),
    Bits(1, &[Bit("limit", 6), Bit("mem", 1), Bit("alloc", 1)]),
    Field("reserved1", U1),
]);

const MON_RF: PayloadSchema = PayloadSchema::new(&[
    Field("version", U1),
    Field("nBlocks", U1),
    Field("reserved0", U2),
    Group(
        Count("nBlocks"),
        &[
            Field("blockId", U1),
            Bits(1, &[Bit("jammingState", 2), Gap(6)]),
            Field("antStatus", E1),
            Field("antPower", E1),
            Field("postStatus", U4),
            Field("reserved1", U4),
            Field("noisePerMS", U2),
            Field("agcCnt", U2),
            Field("jamInd", U1),
            Field("ofsI", I1),
            Field("magI", U1),
            Field("ofsQ", I1),
            Field("magQ", U1),
            Field("reserved2", A(Elem::U1, 3)),
        ],
    ),
]);

const MON_VER: PayloadSchema = PayloadSchema::new(&[
    Field("swVersion", C(30)),
    Field("hwVersion", C(10)),
    Group(Rest, &[Field("extension", C(30))]),
]);

const NAV_POSECEF: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("ecefX", I4),
    Field("ecefY", I4),
    Field("ecefZ", I4),
    Field("pAcc", U4),
]);

const NAV_POSLLH: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("lon", I4),
    Field("lat", I4),
    Field("height", I4),
    Field("hMSL", I4),
    Field("hAcc", U4),
    Field("vAcc", U4),
]);

const NAV_STATUS: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("gpsFix", U1),
    Bits(
        1,
        &[
            Bit("gpsFixOk", 1),
            Bit("diffSoln", 1),
            Bit("wknSet", 1),
            Bit("towSet", 1),
            Gap(4),
        ],
    ),
    Bits(1, &[Bit("diffCorr", 1), Bit("carrSolnValid", 1), Gap(4), Bit("mapMatching", 2)]),
    Bits(
        1,
        &[
            Bit("psmState", 2),
            Gap(1),
            Bit("spoofDetState", 2),
            Gap(1),
            Bit("carrSoln", 2),
        ],
    ),
    Field("ttff", U4),
    Field("msss", U4),
]);

const NAV_DOP: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("gDOP", U2),
    Field("pDOP", U2),
    Field("tDOP", U2),
    Field("vDOP", U2),
    Field("hDOP", U2),
    Field("nDOP", U2),
    Field("eDOP", U2),
]);

const NAV_PVT: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("year", U2),
    Field("month", U1),
    Field("day", U1),
    Field("hour", U1),
    Field("min", U1),
    Field("second", U1),
    Bits(
        1,
        &[
            Bit("validDate", 1),
            Bit("validTime", 1),
            Bit("fullyResolved", 1),
            Bit("validMag", 1),
            Gap(4),
        ],
    ),
    Field("tAcc", U4),
    Field("nano", I4),
    Field("fixType", U1),
    Bits(
        1,
        &[
            Bit("gnssFixOk", 1),
            Bit("difSoln", 1),
            Bit("psmState", 3),
            Bit("headVehValid", 1),
            Bit("carrSoln", 2),
        ],
    ),
    Bits(
        1,
        &[
            Gap(5),
            Bit("confirmedAvai", 1),
            Bit("confirmedDate", 1),
            Bit("confirmedTime", 1),
        ],
    ),
    Field("numSV", U1),
    Field("lon", I4),
    Field("lat", I4),
    Field("height", I4),
    Field("hMSL", I4),
    Field("hAcc", U4),
    Field("vAcc", U4),
    Field("velN", I4),
    Field("velE", I4),
    Field("velD", I4),
    Field("gSpeed", I4),
    Field("headMot", I4),
    Field("sAcc", U4),
    Field("headAcc", U4),
    Field("pDOP", U2),
    Bits(2, &[Bit("invalidLlh", 1), Bit("lastCorrectionAge", 4), Gap(11)]),
    Field("reserved0", A(Elem::U1, 4)),
    Field("headVeh", I4),
    Field("magDec", I2),
    Field("magAcc", U2),
]);

const NAV_VELNED: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("velN", I4),
    Field("velE", I4),
    Field("velD", I4),
    Field("speed", U4),
    Field("gSpeed", U4),
    Field("heading", I4),
    Field("sAcc", U4),
    Field("cAcc", U4),
]);

const NAV_TIMEGPS: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("fTOW", I4),
    Field("week", I2),
    Field("leapS", I1),
    Bits(1, &[Bit("towValid", 1), Bit("weekValid", 1), Bit("leapSValid", 1), Gap(5)]),
    Field("tAcc", U4),
]);

const NAV_TIMEUTC: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("tAcc", U4),
    Field("nano", I4),
    Field("year", U2),
    Field("month", U1),
    Field("day", U1),
    Field("hour", U1),
    Field("min", U1),
    Field("sec", U1),
    Bits(
        1,
        &[
            Bit("validTOW", 1),
            Bit("validWKN", 1),
            Bit("validUTC", 1),
            Gap(1),
            Bit("utcStandard", 4),
        ],
    ),
]);

const NAV_CLOCK: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("clkB", I4),
    Field("clkD", I4),
    Field("tAcc", U4),
    Field("fAcc", U4),
]);

const NAV_SAT: PayloadSchema = PayloadSchema::new(&[
    Field("iTOW", U4),
    Field("version", U1),
    Field("numSvs", U1),
    Field("reserved0", U2),
    Group(
        Count("numSvs"),
        &[
            Field("gnssId", U1),
            Field("svId", U1),
            Field("cno", U1),
            Field("elev", I1),
            Field("azim", I2),
            Field("prRes", I2),
            Bits(
                4,
                &[
                    Bit("qualityInd", 3),
                    Bit("svUsed", 1),
                    Bit("health", 2),
                    Bit("diffCorr", 1),
                    Bit("smoothed", 1),
                    Bit("orbitSource", 3),
                    Bit("ephAvail", 1),
                    Bit("almAvail", 1),
                    Bit("anoAvail", 1),
                    Bit("aopAvail", 1),
                    Gap(1),
                    Bit("sbasCorrUsed", 1),
                    Bit("rtcmCorrUsed", 1),
                    Bit("slasCorrUsed", 1),
                    Bit("spartnCorrUsed", 1),
                    Bit("prCorrUsed", 1),
                    Bit("crCorrUsed", 1),
                    Bit("doCorrUsed", 1),
                    Gap(9),
                ],
            ),
        ],
    ),
]);

const NAV_EOE: PayloadSchema = PayloadSchema::new(&[Field("iTOW", U4)]);

const TIM_TP: PayloadSchema = PayloadSchema::new(&[
    Field("towMS", U4),
    Field("towSubMS", U4),
    Field("qErr", I4),
    Field("week", U2),
    Bits(
        1,
        &[
            Bit("timeBase", 1),
            Bit("utc", 1),
            Bit("raim", 2),
            Bit("qErrInvalid", 1),
            Gap(3),
        ],
    ),
    Bits(1, &[Bit("timeRefGnss", 4), Bit("utcStandard", 4)]),
]);

/// Requests for output, mostly empty
pub(crate) const UBX_PAYLOADS_POLL: &[(&str, PayloadSchema)] = &[
    ("CFG-GNSS", EMPTY),
    ("CFG-INF", PayloadSchema::new(&[Field("protocolID", U1)])),
    ("CFG-MSG", PayloadSchema::new(&[Field("msgClass", U1), Field("msgID", U1)])),
    ("CFG-NAV5", EMPTY),
    ("CFG-PRT", PayloadSchema::new(&[Field("portID", U1)])),
    ("CFG-RATE", EMPTY),
    ("CFG-VALGET", CFG_VALGET_POLL),
    ("MON-HW", EMPTY),
    ("MON-IO", EMPTY),
    ("MON-MSGPP", EMPTY),
    ("MON-RF", EMPTY),
    ("MON-RXBUF", EMPTY),
    ("MON-TXBUF", EMPTY),
    ("MON-VER", EMPTY),
    ("NAV-CLOCK", EMPTY),
    ("NAV-DOP", EMPTY),
    ("NAV-EOE", EMPTY),
    ("NAV-POSECEF", EMPTY),
    ("NAV-POSLLH", EMPTY),
    ("NAV-PVT", EMPTY),
    ("NAV-SAT", EMPTY),
    ("NAV-STATUS", EMPTY),
    ("NAV-TIMEGPS", EMPTY),
    ("NAV-TIMEUTC", EMPTY),
    ("NAV-VELNED", EMPTY),
    ("TIM-TP", EMPTY),
];

/// Output from the receiver
pub(crate) const UBX_PAYLOADS_GET: &[(&str, PayloadSchema)] = &[
    ("ACK-ACK", ACK),
    ("ACK-NAK", ACK),
    ("CFG-GNSS", CFG_GNSS),
    ("CFG-INF", CFG_INF),
    ("CFG-MSG", CFG_MSG),
    ("CFG-NAV5", CFG_NAV5),
    ("CFG-PRT", CFG_PRT),
    ("CFG-RATE", CFG_RATE),
    ("CFG-VALGET", CFG_VALGET),
    ("INF-DEBUG", INF),
    ("INF-ERROR", INF),
    ("INF-NOTICE", INF),
    ("INF-TEST", INF),
    ("INF-WARNING", INF),
    ("MON-HW", MON_HW),
    ("MON-IO", MON_IO),
    ("MON-MSGPP", MON_MSGPP),
    ("MON-RF", MON_RF),
    ("MON-RXBUF", MON_RXBUF),
    ("MON-TXBUF", MON_TXBUF),
    ("MON-VER", MON_VER),
    ("NAV-CLOCK", NAV_CLOCK),
    ("NAV-DOP", NAV_DOP),
    ("NAV-EOE", NAV_EOE),
    ("NAV-POSECEF", NAV_POSECEF),
    ("NAV-POSLLH", NAV_POSLLH),
    ("NAV-PVT", NAV_PVT),
    ("NAV-SAT", NAV_SAT),
    ("NAV-STATUS", NAV_STATUS),
    ("NAV-TIMEGPS", NAV_TIMEGPS),
    ("NAV-TIMEUTC", NAV_TIMEUTC),
    ("NAV-VELNED", NAV_VELNED),
    ("TIM-TP", TIM_TP),
];

/// Commands sent to the receiver
pub(crate) const UBX_PAYLOADS_SET: &[(&str, PayloadSchema)] = &[
    ("CFG-CFG", CFG_CFG),
    ("CFG-GNSS", CFG_GNSS),
    ("CFG-INF", CFG_INF),
    ("CFG-MSG", CFG_MSG),
    ("CFG-NAV5", CFG_NAV5),
    ("CFG-PRT", CFG_PRT),
    ("CFG-RATE", CFG_RATE),
    ("CFG-RST", CFG_RST),
    ("CFG-VALDEL", CFG_VALDEL),
    ("CFG-VALSET", CFG_VALSET),
];
